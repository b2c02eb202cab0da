//! Cubie level representation: which cubie sits in which slot, and how it is
//! oriented there.

use cube_core::errors::{CubeError, ErrorInfo};
use cube_core::{N_FLIP, N_TWIST, N_UR_TO_BR, N_URF_TO_DLB};
use serde::{Deserialize, Serialize};

use crate::facelet::{FaceCube, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};
use crate::verdict::Verdict;

/// Corner cubies and slots.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

impl Corner {
    /// All corners in slot order.
    pub const ALL: [Corner; 8] = [
        Corner::Urf,
        Corner::Ufl,
        Corner::Ulb,
        Corner::Ubr,
        Corner::Dfr,
        Corner::Dlf,
        Corner::Dbl,
        Corner::Drb,
    ];

    /// Slot index of the corner.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Edge cubies and slots.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Edge {
    /// All edges in slot order.
    pub const ALL: [Edge; 12] = [
        Edge::Ur,
        Edge::Uf,
        Edge::Ul,
        Edge::Ub,
        Edge::Dr,
        Edge::Df,
        Edge::Dl,
        Edge::Db,
        Edge::Fr,
        Edge::Fl,
        Edge::Bl,
        Edge::Br,
    ];

    /// Slot index of the edge.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Cube state on the cubie level.
///
/// `cp[i]` is the corner sitting in slot `i` and `co[i]` its twist (0..3);
/// `ep`/`eo` are the same for edges with flips in 0..2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubieCube {
    /// Corner permutation.
    pub cp: [Corner; 8],
    /// Corner orientation.
    pub co: [u8; 8],
    /// Edge permutation.
    pub ep: [Edge; 12],
    /// Edge orientation.
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubieCube {
    /// Returns the solved cube.
    pub fn solved() -> Self {
        Self {
            cp: Corner::ALL,
            co: [0; 8],
            ep: Edge::ALL,
            eo: [0; 12],
        }
    }

    /// Assembles a cube from its four coordinates.
    pub fn from_coordinates(
        flip: u16,
        twist: u16,
        urf_to_dlb: u32,
        ur_to_br: u32,
    ) -> Result<Self, CubeError> {
        let mut cube = Self::solved();
        cube.set_flip(flip)?;
        cube.set_twist(twist)?;
        cube.set_urf_to_dlb(urf_to_dlb)?;
        cube.set_ur_to_br(ur_to_br)?;
        Ok(cube)
    }

    /// Corner orientation coordinate in `0..N_TWIST`.
    pub fn twist(&self) -> u16 {
        self.co[..7]
            .iter()
            .fold(0u16, |acc, &ori| 3 * acc + u16::from(ori % 3))
    }

    /// Sets the corner orientation; the last corner absorbs the remaining twist.
    pub fn set_twist(&mut self, twist: u16) -> Result<(), CubeError> {
        check_range("twist", u32::from(twist), u32::from(N_TWIST))?;
        let mut rest = twist;
        let mut total = 0u16;
        for slot in (0..7).rev() {
            let ori = rest % 3;
            self.co[slot] = ori as u8;
            total += ori;
            rest /= 3;
        }
        self.co[7] = ((3 - total % 3) % 3) as u8;
        Ok(())
    }

    /// Edge orientation coordinate in `0..N_FLIP`.
    pub fn flip(&self) -> u16 {
        self.eo[..11]
            .iter()
            .fold(0u16, |acc, &ori| 2 * acc + u16::from(ori % 2))
    }

    /// Sets the edge orientation; the last edge absorbs the remaining flip.
    pub fn set_flip(&mut self, flip: u16) -> Result<(), CubeError> {
        check_range("flip", u32::from(flip), u32::from(N_FLIP))?;
        let mut rest = flip;
        let mut total = 0u16;
        for slot in (0..11).rev() {
            let ori = rest % 2;
            self.eo[slot] = ori as u8;
            total += ori;
            rest /= 2;
        }
        self.eo[11] = ((2 - total % 2) % 2) as u8;
        Ok(())
    }

    /// Corner permutation coordinate in `0..N_URF_TO_DLB`.
    ///
    /// Fails when `cp` is not a permutation.
    pub fn urf_to_dlb(&self) -> Result<u32, CubeError> {
        permutation_rank(&self.cp, Corner::index, "urf_to_dlb")
    }

    /// Sets the corner permutation from its coordinate.
    pub fn set_urf_to_dlb(&mut self, coordinate: u32) -> Result<(), CubeError> {
        check_range("urf_to_dlb", coordinate, N_URF_TO_DLB)?;
        self.cp = Corner::ALL;
        permutation_unrank(&mut self.cp, coordinate);
        Ok(())
    }

    /// Edge permutation coordinate in `0..N_UR_TO_BR`.
    ///
    /// Fails when `ep` is not a permutation.
    pub fn ur_to_br(&self) -> Result<u32, CubeError> {
        permutation_rank(&self.ep, Edge::index, "ur_to_br")
    }

    /// Sets the edge permutation from its coordinate.
    pub fn set_ur_to_br(&mut self, coordinate: u32) -> Result<(), CubeError> {
        check_range("ur_to_br", coordinate, N_UR_TO_BR)?;
        self.ep = Edge::ALL;
        permutation_unrank(&mut self.ep, coordinate);
        Ok(())
    }

    /// Parity of the corner permutation (0 even, 1 odd).
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp)
    }

    /// Parity of the edge permutation (0 even, 1 odd).
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep)
    }

    /// Runs the structural consistency check.
    ///
    /// Never returns [`Verdict::BadFaceletCount`]; that one belongs to the
    /// surface encoding.
    pub fn verify(&self) -> Verdict {
        let mut edge_count = [0u8; 12];
        for edge in self.ep {
            edge_count[edge.index()] += 1;
        }
        if edge_count.iter().any(|&count| count != 1) {
            return Verdict::MissingEdge;
        }
        let flips: u32 = self.eo.iter().map(|&ori| u32::from(ori)).sum();
        if flips % 2 != 0 {
            return Verdict::FlipError;
        }

        let mut corner_count = [0u8; 8];
        for corner in self.cp {
            corner_count[corner.index()] += 1;
        }
        if corner_count.iter().any(|&count| count != 1) {
            return Verdict::MissingCorner;
        }
        let twists: u32 = self.co.iter().map(|&ori| u32::from(ori)).sum();
        if twists % 3 != 0 {
            return Verdict::TwistError;
        }

        if self.edge_parity() ^ self.corner_parity() != 0 {
            return Verdict::ParityError;
        }
        Verdict::Solvable
    }

    /// Renders the cube as facelet colours.
    pub fn to_face_cube(&self) -> FaceCube {
        let mut facelets = *FaceCube::solved().colors();
        for (slot, positions) in CORNER_FACELET.iter().enumerate() {
            let corner = self.cp[slot].index();
            let ori = usize::from(self.co[slot] % 3);
            for n in 0..3 {
                facelets[positions[(n + ori) % 3]] = CORNER_COLOR[corner][n];
            }
        }
        for (slot, positions) in EDGE_FACELET.iter().enumerate() {
            let edge = self.ep[slot].index();
            let ori = usize::from(self.eo[slot] % 2);
            for n in 0..2 {
                facelets[positions[(n + ori) % 2]] = EDGE_COLOR[edge][n];
            }
        }
        FaceCube::from_colors(facelets)
    }
}

fn check_range(name: &str, value: u32, limit: u32) -> Result<(), CubeError> {
    if value < limit {
        return Ok(());
    }
    Err(CubeError::Coordinate(
        ErrorInfo::new(
            "coordinate-range",
            format!("{name} coordinate {value} is outside 0..{limit}"),
        )
        .with_context("coordinate", name)
        .with_context("value", value.to_string()),
    ))
}

/// Counts inversions mod 2.
fn permutation_parity<T: Ord>(perm: &[T]) -> u8 {
    let mut inversions = 0usize;
    for i in (1..perm.len()).rev() {
        for j in (0..i).rev() {
            if perm[j] > perm[i] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

/// Mixed radix rank: slot `j` contributes the number of left rotations of
/// `perm[..=j]` that bring cubie `j` home, with radix `j + 1`.
fn permutation_rank<T: Copy>(
    perm: &[T],
    index: impl Fn(T) -> usize,
    name: &str,
) -> Result<u32, CubeError> {
    let mut work = perm.to_vec();
    let mut rank = 0u32;
    for j in (1..work.len()).rev() {
        let position = work[..=j]
            .iter()
            .position(|&cubie| index(cubie) == j)
            .ok_or_else(|| {
                CubeError::Coordinate(
                    ErrorInfo::new(
                        "coordinate-permutation",
                        format!("{name} requested for a state that is not a permutation"),
                    )
                    .with_context("coordinate", name)
                    .with_context("missing", j.to_string()),
                )
            })?;
        let rotations = (position + 1) % (j + 1);
        work[..=j].rotate_left(rotations);
        rank = (j as u32 + 1) * rank + rotations as u32;
    }
    Ok(rank)
}

/// Inverse of [`permutation_rank`], applied to the identity in `perm`.
fn permutation_unrank<T>(perm: &mut [T], coordinate: u32) {
    let mut rest = coordinate;
    for j in 1..perm.len() {
        let radix = j as u32 + 1;
        let rotations = (rest % radix) as usize;
        rest /= radix;
        perm[..=j].rotate_right(rotations);
    }
}

//! Solvability check for surface encodings.

use cube_cubie::{Color, FaceCube, Verdict};
use tracing::debug;

/// Facelets of each colour on a well-formed surface.
const FACELETS_PER_COLOR: usize = 9;

/// Checks whether `encoding` describes a solvable cube.
///
/// Unknown symbols or a colour count other than nine give
/// [`Verdict::BadFaceletCount`] without looking any further. Anything else is
/// decided by the cubie level consistency check.
pub fn verify(encoding: &str) -> Verdict {
    let mut counts = [0usize; 6];
    for symbol in encoding.chars() {
        match Color::from_symbol(symbol) {
            Some(color) => counts[color.index()] += 1,
            None => return Verdict::BadFaceletCount,
        }
    }
    if counts.iter().any(|&count| count != FACELETS_PER_COLOR) {
        return Verdict::BadFaceletCount;
    }

    let verdict = match FaceCube::parse(encoding) {
        Ok(face) => face.to_cubie_cube().verify(),
        Err(_) => Verdict::BadFaceletCount,
    };
    debug!(code = verdict.code(), %verdict, "verified surface encoding");
    verdict
}

/// [`verify`] reported as its integer code (0, -1 .. -6).
pub fn verify_code(encoding: &str) -> i32 {
    verify(encoding).code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_cubie::SOLVED_FACELETS;

    #[test]
    fn solved_cube_is_zero() {
        assert_eq!(verify_code(SOLVED_FACELETS), 0);
    }

    #[test]
    fn empty_input_is_malformed() {
        assert_eq!(verify(""), Verdict::BadFaceletCount);
    }

    #[test]
    fn extra_full_face_is_malformed() {
        let encoding = format!("{SOLVED_FACELETS}UUUUUUUUU");
        assert_eq!(verify(&encoding), Verdict::BadFaceletCount);
    }
}

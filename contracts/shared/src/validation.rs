//! Validation helpers for ballot inputs

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::BallotError;
use soroban_sdk::String;

// ===== Proposal Description Validation =====

/// Validate that a proposal description is not blank and fits the size limit.
///
/// Blank means empty or made only of ASCII whitespace.
///
/// # Returns
/// `Ok(())` if valid, `EmptyDescription` or `DescriptionTooLong` otherwise
pub fn validate_description(description: &String) -> Result<(), BallotError> {
    let len = description.len();
    if len == 0 {
        return Err(BallotError::EmptyDescription);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(BallotError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(BallotError::EmptyDescription);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_description_accepts_text() {
        let env = Env::default();
        let description = String::from_str(&env, "description 1ere proposition");
        assert_eq!(validate_description(&description), Ok(()));
    }

    #[test]
    fn test_validate_description_rejects_blank() {
        let env = Env::default();
        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(BallotError::EmptyDescription)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, " \t\n ")),
            Err(BallotError::EmptyDescription)
        );
    }

    #[test]
    fn test_validate_description_length_bound() {
        let env = Env::default();
        let at_limit = String::from_bytes(&env, &[b'a'; MAX_DESCRIPTION_LEN as usize]);
        assert_eq!(validate_description(&at_limit), Ok(()));

        let over_limit = String::from_bytes(&env, &[b'a'; MAX_DESCRIPTION_LEN as usize + 1]);
        assert_eq!(
            validate_description(&over_limit),
            Err(BallotError::DescriptionTooLong)
        );
    }
}

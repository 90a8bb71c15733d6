use crate::core::ics24_host::error::ValidationError as Error;

/// Path separator (ie. forward slash '/')
const PATH_SEPARATOR: char = '/';

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Default validator function for identifiers.
///
/// A valid identifier only contains alphanumeric characters or the allowed
/// special characters, has a length within `min` and `max` (inclusive), and
/// never contains the path separator.
pub fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), Error> {
    assert!(max >= min);

    // Check identifier is not empty
    if id.is_empty() {
        return Err(Error::empty());
    }

    // Check identifier does not contain path separators
    if id.contains(PATH_SEPARATOR) {
        return Err(Error::contain_separator(id.to_string()));
    }

    // Check identifier length is between given min/max
    if id.len() < min || id.len() > max {
        return Err(Error::invalid_length(id.to_string(), id.len(), min, max));
    }

    // Check identifier is lowercase alphanumeric or allowed punctuation
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::invalid_character(id.to_string()));
    }

    Ok(())
}

/// Default validator function for client identifiers.
///
/// A valid identifier must be between 9-64 characters and only contain
/// alphanumeric characters or the allowed special characters.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 9, 64)
}

/// Default validator function for port identifiers.
///
/// A valid identifier must be between 2-128 characters and only contain
/// alphanumeric characters or the allowed special characters.
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 2, 128)
}

/// Default validator function for channel identifiers.
///
/// A valid identifier must be between 8-64 characters and only contain
/// alphanumeric characters or the allowed special characters.
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 8, 64)
}

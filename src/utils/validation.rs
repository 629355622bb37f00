use crate::utils::error::{AnagramError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that exactly `expected` positional arguments were given.
pub fn validate_arg_count(program: &str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(AnagramError::Usage {
            program: program.to_string(),
        });
    }
    Ok(())
}

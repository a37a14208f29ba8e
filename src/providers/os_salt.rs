use crate::protocol::Salt;
use crate::traits::SaltSource;

/// Draws every salt from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSalt;

impl SaltSource for OsRandomSalt {
    fn next_salt(&self) -> Salt {
        Salt::random()
    }
}

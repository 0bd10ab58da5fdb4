/**
 * Authentication building blocks.
 *
 * - `password`: bcrypt hashing and verification on the blocking pool
 * - `token`: JWT issuing and verification
 * - `guard`: header-based access control for protected routes
 */
pub mod guard;
pub mod password;
pub mod token;

pub use guard::AccessGuard;
pub use token::{Claims, Role, TokenService};

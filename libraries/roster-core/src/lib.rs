//! Roster Core
//!
//! Domain types, validation rules and the in-memory user store behind the
//! Roster HTTP service.
//!
//! # Architecture
//!
//! - **Domain Types**: `User`, `NewUser`, `UserPatch`, `UserId`
//! - **Validation**: required fields, email format, email uniqueness
//! - **Store**: `UserStore`, an ordered collection guarded by a single lock
//! - **Error Handling**: `RosterError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use roster_core::{NewUser, UserPatch, UserStore};
//!
//! let store = UserStore::new();
//! let carol = store.insert(NewUser::new("Carol", "carol@example.com")).unwrap();
//! assert_eq!(carol.id.get(), 1);
//!
//! let renamed = store
//!     .update_partial(carol.id, UserPatch::default().with_name("Caroline"))
//!     .unwrap();
//! assert_eq!(renamed.email, "carol@example.com");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{NewUser, User, UserId, UserPatch};

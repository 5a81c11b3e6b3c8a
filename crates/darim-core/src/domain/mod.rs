//! Domain entities - the core business objects.

mod account;
mod date;
mod post;

pub use account::{Credential, Session, SignUpDetails};
pub use date::{DATE_FORMAT, DATETIME_FORMAT, format_date, format_datetime, midnight, parse_date, parse_datetime};
pub use post::{Post, PostDraft, PostId};

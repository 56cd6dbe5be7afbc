pub mod alert;
pub mod avatar;
pub mod button;
pub mod card;
pub mod field;
pub mod page_header;
pub mod spinner;

pub use alert::*;
pub use avatar::*;
pub use button::*;
pub use card::*;
pub use field::*;
pub use page_header::*;
pub use spinner::*;

mod card;
mod field;
mod named_link;
mod navbar;
mod notice;
mod spinner;
mod validation_error;

pub use self::{
    card::*, field::*, named_link::*, navbar::*, notice::*, spinner::*, validation_error::*,
};

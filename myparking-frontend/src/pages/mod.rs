mod home;
mod login;
mod order_parking;
mod parking;
mod parkings;
mod password;
mod profile;
mod register;
mod vehicle;
mod vehicles;

pub use self::{
    home::*, login::*, order_parking::*, parking::*, parkings::*, password::*, profile::*,
    register::*, vehicle::*, vehicles::*,
};

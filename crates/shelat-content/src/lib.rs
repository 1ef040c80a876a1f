//! Shelat Site Content
//!
//! Immutable copy and imagery for every page. The built-in defaults are
//! the published site; a JSON file with the same shape can replace them.

mod aberdeen;
mod error;
mod home;
mod model;
mod site;

pub use error::ContentError;
pub use model::{
    AberdeenHeroContent, AberdeenPage, BrightHeroContent, CallToAction, FontFace, GoogleReview,
    HeroContent, HomePage, InvisalignContent, SiteMetadata,
};
pub use site::SiteContent;

pub type Result<T> = std::result::Result<T, ContentError>;

// the two overlays; both sit on top of whichever screen is showing and are
// independent of each other
mod login;
mod media;

pub use login::LoginModalBox;
pub use media::MediaModalBox;

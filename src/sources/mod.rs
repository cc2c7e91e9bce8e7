pub mod bundled;
pub mod cms;
pub mod traits;

pub use bundled::BundledSource;
pub use cms::CmsSource;
pub use traits::ContentSource;

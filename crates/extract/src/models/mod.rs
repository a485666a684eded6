mod component;
mod item;
mod kind;
mod page;
mod version;

pub use self::component::Component;
pub use self::item::ApiItem;
pub use self::kind::ApiKind;
pub use self::page::Page;
pub use self::version::{DocVersion, VersionFilter};

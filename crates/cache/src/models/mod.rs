mod component;
mod hit;
mod item;
mod page;

pub(crate) use self::component::ComponentRow;
pub use self::hit::{ApiItemHit, PageHit};
pub(crate) use self::hit::{ApiItemHitRow, PageHitRow};
pub(crate) use self::item::ApiItemRow;
pub(crate) use self::page::PageRow;

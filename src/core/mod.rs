pub mod axis_range;
pub mod coordinate_mapper;
pub mod filter;
pub mod layout;
pub mod model;
pub mod row;
pub mod types;

pub use axis_range::{AxisRange, RangeOverride, resolve_axis_range};
pub use coordinate_mapper::{pixel_range_to_data_range, pixel_to_position, value_to_pixel};
pub use filter::{Filter, FilterChange, FilterSet};
pub use layout::{ChartLayout, layout};
pub use model::{InMemoryRowModel, RowModel};
pub use row::{Level, Row, RowId};
pub use types::{Gutter, Point, Viewport};

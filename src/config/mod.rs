pub mod route_settings;
pub mod routes;
pub mod values;

pub use route_settings::RouteSettings;
pub use routes::{Route, RouteTable};
pub use values::{load_values, parse_assignment, parse_values};

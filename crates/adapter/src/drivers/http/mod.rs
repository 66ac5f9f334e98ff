mod driver;

pub use driver::{HttpGateway, HttpGatewayConfig};

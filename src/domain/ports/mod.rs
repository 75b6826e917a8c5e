mod clock_port;
mod http_port;
mod image_provider_port;

pub use clock_port::Clock;
pub use http_port::HttpPort;
pub use image_provider_port::RemoteImageProvider;

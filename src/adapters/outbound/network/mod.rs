pub mod generative_transport;

pub use generative_transport::GenerativeTransport;

mod record_service_port;

pub use record_service_port::RecordServicePort;

pub mod recording_progress;
pub mod scripted_transport;

pub use recording_progress::RecordingProgress;
pub use scripted_transport::{ScriptedTransport, Step};

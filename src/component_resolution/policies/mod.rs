pub mod spec_priority;

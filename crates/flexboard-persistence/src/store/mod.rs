pub mod atomic_writer;
pub mod json_file_slot;
pub mod memory_slot;

pub use atomic_writer::AtomicWriter;
pub use json_file_slot::JsonFileSlot;
pub use memory_slot::MemorySlot;

pub mod bin_heap;

pub use bin_heap::{BinHeap, HeapState};

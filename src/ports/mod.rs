mod launcher;
mod slot_count;

pub use launcher::PhaseLauncher;
pub(crate) use launcher::check_pairing;
pub use slot_count::SlotCount;

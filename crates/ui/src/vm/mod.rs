mod dialog_vm;
mod hedge_card_vm;
mod stats_vm;

pub use dialog_vm::{DialogSectionVm, HedgeDialogVm, SectionBody, map_hedge_dialog};
pub use hedge_card_vm::{HedgeCardVm, map_hedge_card, map_hedge_cards, tone_class};
pub use stats_vm::{StatsPanelVm, map_stats_panel};

//! 版式变更订阅
//!
//! 展示层只通过订阅拿到状态，每次收到的都是已完成的完整快照

use crate::services::layout_state::LayoutState;

pub trait LayoutObserver {
    fn layout_changed(&mut self, state: &LayoutState);
}

impl<F> LayoutObserver for F
where
    F: FnMut(&LayoutState),
{
    fn layout_changed(&mut self, state: &LayoutState) {
        self(state)
    }
}

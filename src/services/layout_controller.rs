//! 版式控制器 - 业务能力层
//!
//! 唯一持有 `LayoutState` 的地方。每次切换先完整算出新状态，
//! 成功后才清空编辑器、替换状态、转移焦点并通知订阅者；
//! 计算失败时什么都不改

use tracing::{debug, info};

use crate::error::LayoutError;
use crate::infrastructure::RegionEditors;
use crate::models::layout::{DocumentType, FirstPageLayout, LastPageLayout};
use crate::models::region::RegionName;
use crate::services::layout_state::LayoutState;
use crate::services::observer::LayoutObserver;

/// 版式控制器
pub struct LayoutController<E: RegionEditors> {
    state: LayoutState,
    editors: E,
    observers: Vec<Box<dyn LayoutObserver>>,
}

impl<E: RegionEditors> LayoutController<E> {
    /// 以报表、首末页均为 `none` 的状态创建控制器，不触碰编辑器内容
    pub fn new(editors: E) -> Result<Self, LayoutError> {
        let state =
            LayoutState::compute(DocumentType::Report, FirstPageLayout::None, LastPageLayout::None)?;
        Ok(Self {
            state,
            editors,
            observers: Vec::new(),
        })
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn editors(&self) -> &E {
        &self.editors
    }

    pub fn editors_mut(&mut self) -> &mut E {
        &mut self.editors
    }

    /// 订阅状态变更
    pub fn subscribe(&mut self, observer: Box<dyn LayoutObserver>) {
        self.observers.push(observer);
    }

    /// 切换首页版式
    ///
    /// 会清空所有区域的内容，包括末页
    pub fn set_first_page_layout(
        &mut self,
        layout: FirstPageLayout,
        doc_type: DocumentType,
    ) -> Result<&LayoutState, LayoutError> {
        let transition = self.plan_first_page_layout(layout, doc_type)?;
        Ok(self.apply(transition))
    }

    /// 按名称切换首页版式
    pub fn set_first_page_layout_named(
        &mut self,
        name: &str,
        doc_type: DocumentType,
    ) -> Result<&LayoutState, LayoutError> {
        let layout = FirstPageLayout::parse(name, doc_type)?;
        self.set_first_page_layout(layout, doc_type)
    }

    /// 普通页面的页眉/页脚开关
    pub fn set_page_sections(
        &mut self,
        header_enabled: bool,
        footer_enabled: bool,
    ) -> Result<&LayoutState, LayoutError> {
        let transition = self.plan_page_sections(header_enabled, footer_enabled)?;
        Ok(self.apply(transition))
    }

    /// 切换末页版式，只清空末页独有的区域
    pub fn set_last_page_layout(&mut self, layout: LastPageLayout) -> Result<&LayoutState, LayoutError> {
        let transition = self.plan_last_page_layout(layout)?;
        Ok(self.apply(transition))
    }

    /// 按名称切换末页版式
    pub fn set_last_page_layout_named(&mut self, name: &str) -> Result<&LayoutState, LayoutError> {
        let layout = LastPageLayout::parse(name, self.state.document_type())?;
        self.set_last_page_layout(layout)
    }

    pub fn navigate_to_last_page(&mut self) -> Result<&LayoutState, LayoutError> {
        let next = self.state.navigated_to_last_page().inspect_err(|e| {
            debug!("忽略跳转: {}", e);
        })?;
        if next != self.state {
            info!("➡️ 跳转到末页");
            self.commit(next, &[]);
        }
        Ok(&self.state)
    }

    pub fn navigate_to_first_page(&mut self) -> Result<&LayoutState, LayoutError> {
        let next = self.state.navigated_to_first_page().inspect_err(|e| {
            debug!("忽略跳转: {}", e);
        })?;
        if next != self.state {
            info!("⬅️ 返回首页");
            self.commit(next, &[]);
        }
        Ok(&self.state)
    }

    /// 把焦点交给当前页面上的某个可编辑区域
    pub fn focus_region(&mut self, region: RegionName) -> Result<&LayoutState, LayoutError> {
        let next = self.state.with_focus(region)?;
        self.commit(next, &[]);
        Ok(&self.state)
    }

    /// 清空全部内容并把首页恢复为页眉+页脚版式
    pub fn clear_all(&mut self) -> Result<&LayoutState, LayoutError> {
        let transition = self.plan_clear_all()?;
        Ok(self.apply(transition))
    }

    // ========== 两段式切换 ==========
    //
    // plan_* 只计算不改动；调用方可以在 apply 之前处理外部副作用（比如存储），
    // 副作用失败时直接丢弃 Transition，状态和编辑器内容保持原样

    pub fn plan_first_page_layout(
        &self,
        layout: FirstPageLayout,
        doc_type: DocumentType,
    ) -> Result<Transition, LayoutError> {
        Ok(Transition {
            next: self.state.with_first_page_layout(layout, doc_type)?,
            cleared: &RegionName::ALL,
            message: format!("📄 首页版式切换为 {} (文档类型: {})", layout, doc_type),
        })
    }

    pub fn plan_first_page_layout_named(
        &self,
        name: &str,
        doc_type: DocumentType,
    ) -> Result<Transition, LayoutError> {
        let layout = FirstPageLayout::parse(name, doc_type)?;
        self.plan_first_page_layout(layout, doc_type)
    }

    pub fn plan_page_sections(
        &self,
        header_enabled: bool,
        footer_enabled: bool,
    ) -> Result<Transition, LayoutError> {
        Ok(Transition {
            next: LayoutState::with_page_sections(header_enabled, footer_enabled)?,
            cleared: &RegionName::ALL,
            message: format!(
                "📄 普通页面: 页眉 {} / 页脚 {}",
                if header_enabled { "开" } else { "关" },
                if footer_enabled { "开" } else { "关" }
            ),
        })
    }

    pub fn plan_last_page_layout(&self, layout: LastPageLayout) -> Result<Transition, LayoutError> {
        Ok(Transition {
            next: self.state.with_last_page_layout(layout)?,
            cleared: &RegionName::LAST_PAGE_OWNED,
            message: format!("📄 末页版式切换为 {}", layout),
        })
    }

    pub fn plan_last_page_layout_named(&self, name: &str) -> Result<Transition, LayoutError> {
        let layout = LastPageLayout::parse(name, self.state.document_type())?;
        self.plan_last_page_layout(layout)
    }

    pub fn plan_clear_all(&self) -> Result<Transition, LayoutError> {
        let doc_type = self.state.document_type();
        Ok(Transition {
            next: self
                .state
                .with_first_page_layout(FirstPageLayout::HeaderFooter, doc_type)?,
            cleared: &RegionName::ALL,
            message: "🧹 清空全部内容".to_string(),
        })
    }

    /// 提交一次已计算好的切换
    pub fn apply(&mut self, transition: Transition) -> &LayoutState {
        info!("{}", transition.message);
        self.commit(transition.next, transition.cleared);
        &self.state
    }

    fn commit(&mut self, next: LayoutState, cleared: &[RegionName]) {
        for &region in cleared {
            self.editors.clear(region);
        }

        self.state = next;
        self.editors.focus(self.state.active_region());

        for observer in &mut self.observers {
            observer.layout_changed(&self.state);
        }
    }
}

/// 已计算但尚未提交的版式切换
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    next: LayoutState,
    cleared: &'static [RegionName],
    message: String,
}

impl Transition {
    pub fn next(&self) -> &LayoutState {
        &self.next
    }

    /// 提交时会被清空的区域
    pub fn cleared(&self) -> &'static [RegionName] {
        self.cleared
    }
}

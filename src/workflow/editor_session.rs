//! 编辑会话 - 流程层
//!
//! 把版式控制器、编辑器内容和存储串起来：
//! 启动参数 → 初始版式 → 编辑 / 切换 / 跳转 → 保存

use tracing::{info, warn};

use crate::error::AppResult;
use crate::infrastructure::{ContentStore, EditorSet};
use crate::models::{DocumentType, LayoutSettings, RegionName, SavedDocument, StartupParams};
use crate::services::{
    render, selection_summary, EditorView, LayoutController, LayoutObserver, LayoutState,
    Transition,
};

/// 编辑会话
pub struct EditorSession<S: ContentStore> {
    controller: LayoutController<EditorSet>,
    store: S,
    settings: LayoutSettings,
    params: StartupParams,
}

impl<S: ContentStore> EditorSession<S> {
    /// 按启动参数创建会话
    ///
    /// 参数里没有文档类型时保持空白版式，不清空存储
    pub fn start(params: StartupParams, store: S) -> AppResult<Self> {
        let settings = LayoutSettings::load(&store)?;
        let controller = LayoutController::new(EditorSet::new())?;

        let mut session = Self {
            controller,
            store,
            settings,
            params,
        };

        for line in session.summary() {
            info!("📋 {}", line);
        }

        if session.params.doc_type_given {
            session.apply_startup_layout()?;
        }

        Ok(session)
    }

    fn apply_startup_layout(&mut self) -> AppResult<()> {
        let params = self.params.clone();
        match params.doc_type {
            DocumentType::Page => {
                let transition = self
                    .controller
                    .plan_page_sections(params.header, params.footer)?;
                self.commit(transition)?;
            }
            DocumentType::Report => {
                let transition = self
                    .controller
                    .plan_first_page_layout(params.first_page, DocumentType::Report)?;
                self.commit(transition)?;
                let transition = self.controller.plan_last_page_layout(params.last_page)?;
                self.commit(transition)?;
            }
        }
        Ok(())
    }

    pub fn state(&self) -> &LayoutState {
        self.controller.state()
    }

    pub fn editors(&self) -> &EditorSet {
        self.controller.editors()
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn params(&self) -> &StartupParams {
        &self.params
    }

    pub fn summary(&self) -> Vec<String> {
        selection_summary(&self.params)
    }

    pub fn view(&self) -> EditorView {
        render(self.controller.state(), &self.settings)
    }

    pub fn subscribe(&mut self, observer: Box<dyn LayoutObserver>) {
        self.controller.subscribe(observer);
    }

    /// 切换首页版式，所有区域内容及其存储都会被清除
    pub fn change_first_page_layout(&mut self, name: &str) -> AppResult<&LayoutState> {
        let doc_type = self.controller.state().document_type();
        let transition = self.controller.plan_first_page_layout_named(name, doc_type)?;
        self.commit(transition)
    }

    /// 切换末页版式，只清除末页独有区域
    pub fn change_last_page_layout(&mut self, name: &str) -> AppResult<&LayoutState> {
        let transition = self.controller.plan_last_page_layout_named(name)?;
        self.commit(transition)
    }

    /// 普通页面的页眉/页脚开关
    pub fn change_page_sections(&mut self, header: bool, footer: bool) -> AppResult<&LayoutState> {
        let transition = self.controller.plan_page_sections(header, footer)?;
        self.commit(transition)
    }

    pub fn go_to_last_page(&mut self) -> AppResult<&LayoutState> {
        Ok(self.controller.navigate_to_last_page()?)
    }

    pub fn go_to_first_page(&mut self) -> AppResult<&LayoutState> {
        Ok(self.controller.navigate_to_first_page()?)
    }

    pub fn focus(&mut self, region: RegionName) -> AppResult<()> {
        self.controller.focus_region(region)?;
        Ok(())
    }

    /// 在区域中写入内容，区域必须在当前页面可编辑
    pub fn write(&mut self, region: RegionName, html: impl Into<String>) -> AppResult<()> {
        self.controller.focus_region(region)?;
        self.controller.editors_mut().set_content(region, html);
        Ok(())
    }

    /// 把所有区域内容写入存储
    pub fn save(&mut self) -> AppResult<SavedDocument> {
        let contents = self.controller.editors().snapshot();
        for (region, html) in &contents {
            self.store.set(region.storage_key(), html)?;
        }

        let state = self.controller.state();
        let document = SavedDocument {
            saved_at: chrono::Local::now(),
            document_type: state.document_type(),
            first_page_layout: state.first_page_layout(),
            last_page_layout: state.last_page_layout(),
            contents,
        };

        info!(
            "💾 已保存文档 ({} 个非空区域)",
            document.contents.values().filter(|c| !c.is_empty()).count()
        );
        Ok(document)
    }

    /// 清空全部内容，首页恢复为页眉+页脚
    pub fn clear_all(&mut self) -> AppResult<&LayoutState> {
        let transition = self.controller.plan_clear_all()?;
        self.commit(transition)
    }

    /// 更新区域最小高度并持久化
    pub fn update_settings(&mut self, settings: LayoutSettings) -> AppResult<()> {
        settings.save(&mut self.store)?;
        self.settings = settings;
        info!("📐 版式设置已更新");
        Ok(())
    }

    /// 先删除被清空区域的存储内容，成功后才提交版式切换
    fn commit(&mut self, transition: Transition) -> AppResult<&LayoutState> {
        let keys: Vec<&str> = transition
            .cleared()
            .iter()
            .map(|region| region.storage_key())
            .collect();
        if let Err(e) = self.store.remove_many(&keys) {
            warn!("⚠️ 清除存储内容失败，版式保持不变: {}", e);
            return Err(e);
        }
        Ok(self.controller.apply(transition))
    }
}

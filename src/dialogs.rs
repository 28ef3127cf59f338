//! 对话框状态管理
//!
//! 删除确认状态机、新增表单和帮助面板的显示状态。

/// 删除确认状态机：Idle → Pending(id) → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending(i64),
}

impl DeleteConfirm {
    /// 进入（或替换）待确认状态，不发请求
    pub fn request(&mut self, id: i64) {
        *self = DeleteConfirm::Pending(id);
    }

    /// 取出待删除的 id 并回到 Idle
    pub fn take(&mut self) -> Option<i64> {
        match std::mem::take(self) {
            DeleteConfirm::Pending(id) => Some(id),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    pub fn pending_id(&self) -> Option<i64> {
        match self {
            DeleteConfirm::Pending(id) => Some(*id),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteConfirm::Pending(_))
    }
}

/// 新增表单当前聚焦的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    TaskName,
    Deadline,
}

/// 新增表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub task_name: String,
    pub deadline: String,
    pub focus: FormField,
}

impl AddForm {
    pub fn input_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::TaskName => FormField::Deadline,
            FormField::Deadline => FormField::TaskName,
        };
    }

    pub fn clear(&mut self) {
        self.task_name.clear();
        self.deadline.clear();
        self.focus = FormField::TaskName;
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::TaskName => &mut self.task_name,
            FormField::Deadline => &mut self.deadline,
        }
    }
}

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 删除确认
    pub delete_confirm: DeleteConfirm,
    /// 新增表单内容（关闭弹窗后保留）
    pub add_form: AddForm,
    /// 是否显示新增弹窗
    pub show_add_dialog: bool,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_add_dialog || self.show_help || self.delete_confirm.is_pending()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_confirm_transitions() {
        let mut confirm = DeleteConfirm::default();
        assert_eq!(confirm, DeleteConfirm::Idle);

        confirm.request(3);
        assert_eq!(confirm.pending_id(), Some(3));

        // 选择另一个 todo 直接替换，不排队
        confirm.request(5);
        assert_eq!(confirm.pending_id(), Some(5));

        assert_eq!(confirm.take(), Some(5));
        assert_eq!(confirm, DeleteConfirm::Idle);
        assert_eq!(confirm.take(), None);
    }

    #[test]
    fn test_delete_cancel() {
        let mut confirm = DeleteConfirm::Pending(1);
        confirm.cancel();
        assert!(!confirm.is_pending());
    }

    #[test]
    fn test_form_input_goes_to_focused_field() {
        let mut form = AddForm::default();
        form.input_char('h');
        form.input_char('i');
        form.toggle_focus();
        form.input_char('2');
        form.delete_char();
        form.input_char('1');

        assert_eq!(form.task_name, "hi");
        assert_eq!(form.deadline, "1");

        form.clear();
        assert_eq!(form, AddForm::default());
    }

    #[test]
    fn test_has_active_dialog() {
        let mut state = DialogState::new();
        assert!(!state.has_active_dialog());

        state.delete_confirm.request(1);
        assert!(state.has_active_dialog());

        state.delete_confirm.cancel();
        state.show_help = true;
        assert!(state.has_active_dialog());
    }
}

/// Graph-level attributes of the `stateGraph` root element.
///
/// These are the same for every generated document; `Default` gives the values
/// the authoring tool expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSettings {
    pub first_check_all_states: bool,
    pub case_insensitive: bool,
    pub unordered: bool,
    pub lock_widget: bool,
    pub hint_policy: String,
    pub version: String,
    pub suppress_student_feedback: String,
    pub highlight_right_selection: bool,
    pub confirm_done: bool,
    pub start_state_node_name: String,
    pub tutor_type: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            first_check_all_states: true,
            case_insensitive: true,
            unordered: true,
            lock_widget: true,
            hint_policy: "Use Both Kinds of Bias".to_string(),
            version: "4.0".to_string(),
            suppress_student_feedback: "Show All Feedback".to_string(),
            highlight_right_selection: true,
            confirm_done: false,
            start_state_node_name: "%(startStateNodeName)%".to_string(),
            tutor_type: "Example-tracing Tutor".to_string(),
        }
    }
}

impl GraphSettings {
    /// Root attributes in document order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("firstCheckAllStates", self.first_check_all_states.to_string()),
            ("caseInsensitive", self.case_insensitive.to_string()),
            ("unordered", self.unordered.to_string()),
            ("lockWidget", self.lock_widget.to_string()),
            ("hintPolicy", self.hint_policy.clone()),
            ("version", self.version.clone()),
            (
                "suppressStudentFeedback",
                self.suppress_student_feedback.clone(),
            ),
            (
                "highlightRightSelection",
                self.highlight_right_selection.to_string(),
            ),
            ("confirmDone", self.confirm_done.to_string()),
            ("startStateNodeName", self.start_state_node_name.clone()),
            ("tutorType", self.tutor_type.clone()),
        ]
    }
}

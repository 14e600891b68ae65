/// Tools that are reserved but have no behaviour yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubTool {
    ModelSync,
    NameRefactor,
}

impl StubTool {
    pub fn name(&self) -> &'static str {
        match self {
            StubTool::ModelSync => "model_sync",
            StubTool::NameRefactor => "name_refactor",
        }
    }
}

pub fn stub_message(tool: StubTool) -> String {
    format!("Placeholder for {}. Implementation pending.", tool.name())
}

/// Prints the fixed placeholder line for `tool`.
pub fn run_stub(tool: StubTool) {
    tracing::debug!("{} has no implementation yet", tool.name());
    println!("{}", stub_message(tool));
}

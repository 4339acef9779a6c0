//! Go method builder.

use crate::builder::{CodeFragment, Renderable};

/// A parameter (or receiver) in a Go function signature.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for a Go method declaration.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<String>,
    receiver: Param,
    params: Vec<Param>,
    results: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new(receiver: Param, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.results.push(ty.into());
        self
    }

    /// Add a line to the method body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a structured fragment (e.g. a multi-line composite literal).
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        let results = match self.results.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", single),
            many => format!(" ({})", many.join(", ")),
        };

        format!(
            "func ({} {}) {}({}){} {{",
            self.receiver.name, self.receiver.ty, self.name, params, results
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc.clone()));
        }
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.clone(),
            Some("}".to_string()),
        ));
        fragments
    }
}

use protojson_ir::GenerationOptions;

use crate::{
    ast::{Method, Param},
    builder::{CodeFragment, Renderable},
};

/// The `MarshalJSON`/`UnmarshalJSON` pair for one Go type.
///
/// Each method is preceded by a blank line, so blocks concatenate without
/// separators.
#[derive(Debug, Clone)]
pub struct MessageMethods<'a> {
    type_name: &'a str,
    options: &'a GenerationOptions,
}

impl<'a> MessageMethods<'a> {
    pub fn new(type_name: &'a str, options: &'a GenerationOptions) -> Self {
        Self { type_name, options }
    }

    fn receiver(&self) -> Param {
        Param::new("msg", format!("*{}", self.type_name))
    }

    fn marshal(&self) -> Method {
        let marshaler = CodeFragment::block(
            "err := (&jsonpb.Marshaler{",
            vec![
                CodeFragment::line(format!("EnumsAsInts: {},", self.options.enums_as_ints)),
                CodeFragment::line(format!("EmitDefaults: {},", self.options.emit_defaults)),
                CodeFragment::line(format!("OrigName: {},", self.options.orig_name)),
            ],
            Some("}).Marshal(&buf, msg)".to_string()),
        );

        Method::new(self.receiver(), "MarshalJSON")
            .doc("MarshalJSON implements json.Marshaler")
            .returns("[]byte")
            .returns("error")
            .statement("var buf bytes.Buffer")
            .fragment(marshaler)
            .statement("return buf.Bytes(), err")
    }

    fn unmarshal(&self) -> Method {
        Method::new(self.receiver(), "UnmarshalJSON")
            .doc("UnmarshalJSON implements json.Unmarshaler")
            .param(Param::new("b", "[]byte"))
            .returns("error")
            .statement(format!(
                "return {}(bytes.NewReader(b), msg)",
                self.options.unmarshaler
            ))
    }
}

impl Renderable for MessageMethods<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::Blank];
        fragments.extend(self.marshal().to_fragments());
        fragments.push(CodeFragment::Blank);
        fragments.extend(self.unmarshal().to_fragments());
        fragments
    }
}

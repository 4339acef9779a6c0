//! Lowering of protobuf file descriptors into schema units.

use eyre::{Result, eyre};
use prost_types::{DescriptorProto, FileDescriptorProto};
use protojson_core::file_stem;
use protojson_ir::{RecordType, SchemaUnit};

/// Convert a file descriptor into the IR consumed by the generator.
///
/// Messages are flattened pre-order: each message is followed by its nested
/// messages before the next sibling.
pub fn lower_file(file: &FileDescriptorProto) -> Result<SchemaUnit> {
    let name = file
        .name
        .as_deref()
        .ok_or_else(|| eyre!("file descriptor has no name"))?;

    let mut unit = SchemaUnit::new(name, go_package_name(file));
    collect_messages(&file.message_type, &[], &mut unit.types);
    Ok(unit)
}

fn collect_messages(messages: &[DescriptorProto], outers: &[String], out: &mut Vec<RecordType>) {
    for message in messages {
        let name = message.name().to_string();
        let map_entry = message
            .options
            .as_ref()
            .is_some_and(|opts| opts.map_entry());

        out.push(RecordType {
            name: name.clone(),
            outers: outers.to_vec(),
            map_entry,
        });

        let mut nested_outers = outers.to_vec();
        nested_outers.push(name);
        collect_messages(&message.nested_type, &nested_outers, out);
    }
}

/// Resolve the Go package name for a file.
///
/// Precedence: `go_package` (explicit `;name` suffix, else last path
/// element), then the proto package, then the file's base name.
pub fn go_package_name(file: &FileDescriptorProto) -> String {
    let go_package = file
        .options
        .as_ref()
        .map(|opts| opts.go_package())
        .filter(|pkg| !pkg.is_empty());

    let raw = match go_package {
        Some(pkg) => match pkg.split_once(';') {
            Some((_, name)) => name.to_string(),
            None => pkg.rsplit('/').next().unwrap_or(pkg).to_string(),
        },
        None if !file.package().is_empty() => file.package().to_string(),
        None => {
            let stem = file_stem(file.name());
            stem.rsplit('/').next().unwrap_or(stem).to_string()
        }
    };

    sanitize_package_name(&raw)
}

fn sanitize_package_name(name: &str) -> String {
    name.replace(['.', '-'], "_")
}

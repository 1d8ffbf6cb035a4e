use anyhow::Context;
use comfy_table::CellAlignment;
use eofscope::EofContainer;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, InputArgs},
    commands::common::load_input,
    output::{print_output, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub index: usize,
    pub kind: String,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct SectionListing {
    pub source: String,
    pub revision: String,
    pub version: u8,
    pub header_size: usize,
    pub sections: Vec<SectionEntry>,
}

pub fn run(input: &InputArgs, opts: &GlobalOptions) -> anyhow::Result<()> {
    let loaded = load_input(input)?;
    let container = EofContainer::parse(input.revision, &loaded.bytes)
        .with_context(|| format!("failed to parse container: {}", loaded.source))?;

    let listing = SectionListing {
        source: loaded.source.clone(),
        revision: input.revision.to_string(),
        version: container.version().value(),
        header_size: container.header_size(),
        sections: container
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| SectionEntry {
                index,
                kind: section.kind.to_string(),
                offset: section.offset,
                size: section.data.len(),
            })
            .collect(),
    };

    print_output(&listing, opts, |l| {
        println!(
            "{source}  (EOF version {version}, header {header} bytes)",
            source = l.source,
            version = l.version,
            header = l.header_size
        );

        let mut table = TabWriter::new(&[
            ("#", CellAlignment::Right),
            ("KIND", CellAlignment::Left),
            ("OFFSET", CellAlignment::Right),
            ("SIZE", CellAlignment::Right),
        ]);
        for s in &l.sections {
            table.row(vec![
                s.index.to_string(),
                s.kind.clone(),
                format!("0x{:04X}", s.offset),
                s.size.to_string(),
            ]);
        }
        table.print();
    })
}

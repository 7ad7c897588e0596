use crate::stylesheet::{Property, Stylesheet};
use std::io::Write;

/// The walker is used to print a parsed stylesheet back as CSS text.
pub struct Walker<'a> {
    sheet: &'a Stylesheet,
}

impl<'a> Walker<'a> {
    pub fn new(sheet: &'a Stylesheet) -> Self {
        Self { sheet }
    }

    pub fn walk_stdout(&self) {
        let _ = inner_walk(self.sheet, &mut std::io::stdout());
    }

    pub fn walk_to_string(&self) -> String {
        let mut output: Vec<u8> = Vec::new();
        let _ = inner_walk(self.sheet, &mut output);
        String::from_utf8_lossy(&output).into_owned()
    }
}

fn inner_walk(sheet: &Stylesheet, f: &mut dyn Write) -> Result<(), std::io::Error> {
    if sheet.encoding != "utf-8" {
        writeln!(f, "@charset \"{}\";", sheet.encoding)?;
        writeln!(f)?;
    }

    // selectors and properties are sorted so the output is stable
    let mut selectors: Vec<&String> = sheet.properties.keys().collect();
    selectors.sort();

    for selector in selectors {
        writeln!(f, "{} {{", selector)?;
        let mut properties: Vec<&Property> = sheet.properties[selector].iter().collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        for property in properties {
            if property.important {
                writeln!(f, "    {}: {} !important;", property.name, property.value)?;
            } else {
                writeln!(f, "    {}: {};", property.name, property.value)?;
            }
        }
        writeln!(f, "}}")?;
    }

    Ok(())
}

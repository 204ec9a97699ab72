use crate::core::template::Template;
use crate::domain::model::ProjectRecord;
use crate::utils::error::Result;

/// Appends one `index-entry` anchor. Field values go in unescaped.
pub fn write_entry(out: &mut String, project: &ProjectRecord) {
    out.push_str("\t\t\t<a class = \"index-entry\" href = \"");
    out.push_str(&project.repository());
    out.push_str("\">\n");

    out.push_str("\t\t\t\t<span class = \"title\">");
    out.push_str(&project.title());
    out.push_str("</span>\n");

    out.push_str("\t\t\t\t<span class = \"description\">");
    out.push_str(&project.description());
    out.push_str("</span>\n");

    out.push_str("\t\t\t\t<img class = \"logo\" src = \"");
    out.push_str(&project.logo());
    out.push_str("\"></img>\n");

    out.push_str("\t\t\t</a>\n");
}

pub fn write_index<'a, I>(out: &mut String, projects: I)
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    out.push_str("\t\t<div class = \"index\">\n");
    for project in projects {
        write_entry(out, project);
    }
    out.push_str("\t\t</div>\n");
}

pub fn render_entry(project: &ProjectRecord) -> String {
    let mut out = String::new();
    write_entry(&mut out, project);
    out
}

pub fn render_index<'a, I>(projects: I) -> String
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut out = String::new();
    write_index(&mut out, projects);
    out
}

/// Renders the index, drops its trailing newlines and places it at the
/// template's single `%s`. Nothing is appended after the template text.
pub fn render_document<'a, I>(projects: I, template: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let template = Template::parse(template)?;
    let index = render_index(projects);
    Ok(template.substitute(index.trim_end_matches('\n')))
}

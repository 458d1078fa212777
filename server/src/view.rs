use axum::response::Html;
use error_stack::ResultExt;
use handlebars::Handlebars;
use kernel::KernelError;
use serde::Serialize;

/// A view model bound to the template that renders it.
pub trait Page: Serialize {
    const TEMPLATE: &'static str;
}

const TEMPLATES: [(&str, &str); 4] = [
    ("nav", include_str!("../templates/nav.hbs")),
    ("home", include_str!("../templates/home.hbs")),
    ("add_author", include_str!("../templates/add_author.hbs")),
    ("add_book", include_str!("../templates/add_book.hbs")),
];

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, source)
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("Failed to compile template {name}"))?;
        }
        Ok(Self { registry })
    }

    pub fn render<P: Page>(&self, page: &P) -> error_stack::Result<Html<String>, KernelError> {
        let html = self
            .registry
            .render(P::TEMPLATE, page)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to render template {}", P::TEMPLATE))?;
        Ok(Html(html))
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;
    use serde::Serialize;
    use serde_json::json;

    use super::{Page, Views};

    #[derive(Serialize)]
    struct Raw(serde_json::Value);

    impl Page for Raw {
        const TEMPLATE: &'static str = "add_book";
    }

    #[test]
    fn escapes_user_text() -> error_stack::Result<(), KernelError> {
        let views = Views::new()?;
        let page = Raw(json!({
            "authors": [{ "id": 1, "name": "<script>", "birth_date": null, "date_of_death": null }],
            "message": null,
        }));
        let html = views.render(&page)?.0;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        Ok(())
    }
}

// Minimal HTML rendering for the product pages
//
// Every piece of entity text goes through `escape`.

use std::fmt::Write;

use super::action_result::{ProductView, ViewResult, PAGES_SCOPE};
use crate::core::FieldError;
use crate::modules::products::models::Product;

/// Render a view descriptor into a complete HTML document
pub fn render(view: &ViewResult) -> String {
    let body = match view.view {
        ProductView::Index => index(view.model.products().unwrap_or_default()),
        ProductView::Details => match view.model.product() {
            Some(product) => details(product),
            None => String::new(),
        },
        ProductView::Create => form(
            "Create product",
            &format!("{}/create", PAGES_SCOPE),
            view.model.product(),
            &view.errors,
        ),
        ProductView::Edit => form(
            "Edit product",
            &format!(
                "{}/edit/{}",
                PAGES_SCOPE,
                view.model.product().map_or(0, |p| p.id)
            ),
            view.model.product(),
            &view.errors,
        ),
        ProductView::Delete => match view.model.product() {
            Some(product) => delete_confirmation(product),
            None => String::new(),
        },
    };

    format!(
        "<!DOCTYPE html>\n<html>\n\
         <head><meta charset=\"utf-8\"><title>{} - Products</title></head>\n\
         <body>\n{}</body>\n</html>\n",
        view.view.name(),
        body
    )
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn index(products: &[Product]) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>Products</h1>");
    let _ = writeln!(html, "<p><a href=\"{}/create\">Create new</a></p>", PAGES_SCOPE);
    let _ = writeln!(
        html,
        "<table>\n<tr><th>Name</th><th>Price</th><th>Stock</th><th></th></tr>"
    );
    for product in products {
        let _ = writeln!(
            html,
            "<tr><td>{name}</td><td>{price}</td><td>{stock}</td><td>\
             <a href=\"{scope}/edit/{id}\">Edit</a> | \
             <a href=\"{scope}/details/{id}\">Details</a> | \
             <a href=\"{scope}/delete/{id}\">Delete</a></td></tr>",
            name = escape(&product.name),
            price = product.price,
            stock = product.stock,
            scope = PAGES_SCOPE,
            id = product.id,
        );
    }
    let _ = writeln!(html, "</table>");
    html
}

fn details(product: &Product) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>Details</h1>");
    html.push_str(&definition_list(product));
    let _ = writeln!(
        html,
        "<p><a href=\"{scope}/edit/{id}\">Edit</a> | <a href=\"{scope}\">Back to List</a></p>",
        scope = PAGES_SCOPE,
        id = product.id,
    );
    html
}

fn delete_confirmation(product: &Product) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>Delete</h1>");
    let _ = writeln!(html, "<h3>Are you sure you want to delete this?</h3>");
    html.push_str(&definition_list(product));
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"{scope}/delete/{id}\">\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\
         <button type=\"submit\">Delete</button> | <a href=\"{scope}\">Back to List</a></form>",
        scope = PAGES_SCOPE,
        id = product.id,
    );
    html
}

fn definition_list(product: &Product) -> String {
    format!(
        "<dl>\n<dt>Name</dt><dd>{}</dd>\n\
         <dt>Price</dt><dd>{}</dd>\n\
         <dt>Stock</dt><dd>{}</dd>\n</dl>\n",
        escape(&product.name),
        product.price,
        product.stock
    )
}

fn form(title: &str, action: &str, product: Option<&Product>, errors: &[FieldError]) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>{}</h1>", escape(title));
    let _ = writeln!(html, "<form method=\"post\" action=\"{}\">", escape(action));

    if let Some(product) = product.filter(|p| p.id != 0) {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"id\" value=\"{}\">",
            product.id
        );
    }

    let name = product.map(|p| p.name.clone()).unwrap_or_default();
    let price = product.map(|p| p.price.to_string()).unwrap_or_default();
    let stock = product.map(|p| p.stock.to_string()).unwrap_or_default();

    for (field, label, value) in [
        ("name", "Name", name),
        ("price", "Price", price),
        ("stock", "Stock", stock),
    ] {
        let _ = writeln!(
            html,
            "<div><label for=\"{field}\">{label}</label>\
             <input id=\"{field}\" name=\"{field}\" value=\"{value}\">{errors}</div>",
            field = field,
            label = label,
            value = escape(&value),
            errors = field_errors(errors, field),
        );
    }

    let _ = writeln!(
        html,
        "<button type=\"submit\">Save</button> | <a href=\"{}\">Back to List</a>\n</form>",
        PAGES_SCOPE
    );
    html
}

fn field_errors(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .filter(|e| e.field == field)
        .map(|e| format!("<span class=\"field-error\">{}</span>", escape(&e.message)))
        .collect()
}

//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::type_to_string;

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    // Sub sections render their own header after a blank line
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let inline_code = match &info.inline_doc {
        Some(comment) => {
            let tail = format!("  # {}", comment);
            quote! { out.push_str(#tail); }
        }
        None => quote! {},
    };

    // Unset optional fields are written commented out
    let ty_str = type_to_string(&info.ty);
    if ty_str.starts_with("Option<") {
        let line = format!("# {} = \"\"", toml_name);
        return quote! {
            #doc_code
            match toml::Value::try_from(default.#field_name.clone()) {
                Ok(value) => {
                    out.push_str(#toml_name);
                    out.push_str(" = ");
                    out.push_str(&value.to_string());
                }
                Err(_) => out.push_str(#line),
            }
            #inline_code
            out.push('\n');
        };
    }

    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        #inline_code
        out.push('\n');
    }
}

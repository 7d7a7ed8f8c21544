//! Identifier case helpers: type names -> route parameter names (camelCase) and namespace keys (snake_case).

/// Convert a single identifier to lower camelCase.
/// e.g. "TestModel" -> "testModel", "blog_post" -> "blogPost"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = !out.is_empty();
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else if out.is_empty() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a single identifier from CamelCase to snake_case. A run of capitals is one word.
/// e.g. "UserController" -> "user_controller", "HTTPController" -> "http_controller"
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let word_start = match prev {
                None => false,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                Some(_) => true,
            };
            if word_start && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Last path segment of a Rust type path or class name, generics stripped.
/// e.g. "app::models::TestModel" -> "TestModel", "App\\Http\\UserController" -> "UserController"
pub fn short_type_name(path: &str) -> &str {
    let without_generics = path.split('<').next().unwrap_or(path);
    without_generics
        .rsplit(|c: char| c == ':' || c == '\\')
        .next()
        .unwrap_or(without_generics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_lowers_first_letter() {
        assert_eq!(to_camel_case("TestModel"), "testModel");
        assert_eq!(to_camel_case("blog_post"), "blogPost");
        assert_eq!(to_camel_case("user"), "user");
    }

    #[test]
    fn snake_case_from_class_names() {
        assert_eq!(to_snake_case("UserController"), "user_controller");
        assert_eq!(to_snake_case("testModel"), "test_model");
        assert_eq!(to_snake_case("Already_Snake"), "already_snake");
        assert_eq!(to_snake_case("HTTPController"), "http_controller");
        assert_eq!(to_snake_case("ApiV2HTTPHandler"), "api_v2_http_handler");
        assert_eq!(to_snake_case("URL"), "url");
    }

    #[test]
    fn short_name_strips_paths_and_generics() {
        assert_eq!(short_type_name("app::models::TestModel"), "TestModel");
        assert_eq!(short_type_name("App\\Http\\UserController"), "UserController");
        assert_eq!(short_type_name("crate::Wrapper<crate::Inner>"), "Wrapper");
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}

//! lib/utils.ts generation: the shared class-merging helper every exported
//! component imports via the `@/lib` alias.

pub fn generate_utility_module() -> String {
    r#"import { type ClassValue, clsx } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_cn_helper() {
        let utils = generate_utility_module();
        assert!(utils.contains("export function cn"));
        assert!(utils.contains("twMerge(clsx(inputs))"));
    }
}

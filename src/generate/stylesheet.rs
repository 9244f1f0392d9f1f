//! globals.css generation: color tokens for light and dark themes with the
//! resolved accent embedded as the primary/ring values.

use crate::theme::ThemeSelection;

pub fn generate_stylesheet(theme: &ThemeSelection) -> String {
    let accent = theme.accent;
    let light_primary = theme.light();
    let dark_primary = theme.dark();

    format!(
        r#"/* Design System - Global Styles */
/* Generated with accent color: {accent} */

@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {{
  :root {{
    /* Light Theme */
    --background: 0 0% 100%;
    --foreground: 0 0% 9%;

    --card: 0 0% 96%;
    --card-foreground: 0 0% 9%;

    --popover: 0 0% 100%;
    --popover-foreground: 0 0% 9%;

    /* Primary - accent color */
    --primary: {light_primary};
    --primary-foreground: 0 0% 100%;

    --secondary: 0 0% 22%;
    --secondary-foreground: 0 0% 100%;

    --muted: 0 0% 96%;
    --muted-foreground: 0 0% 32%;

    --accent: 0 0% 96%;
    --accent-foreground: 0 0% 9%;

    --destructive: 0 84% 48%;
    --destructive-foreground: 0 0% 100%;

    --border: 0 0% 88%;
    --input: 0 0% 88%;
    --ring: {light_primary};

    --radius: 0px;

    /* Status Colors */
    --success: 152 69% 31%;
    --success-bg: 136 52% 86%;
    --warning: 46 100% 47%;
    --warning-bg: 48 89% 91%;
    --info: 217 91% 53%;
    --info-bg: 214 100% 93%;
    --error: 0 84% 48%;
    --error-bg: 0 100% 97%;
  }}

  .dark {{
    /* Dark Theme */
    --background: 0 0% 9%;
    --foreground: 0 0% 96%;

    --card: 0 0% 15%;
    --card-foreground: 0 0% 96%;

    --popover: 0 0% 15%;
    --popover-foreground: 0 0% 96%;

    --primary: {dark_primary};
    --primary-foreground: 0 0% 100%;

    --secondary: 0 0% 32%;
    --secondary-foreground: 0 0% 100%;

    --muted: 0 0% 15%;
    --muted-foreground: 0 0% 66%;

    --accent: 0 0% 22%;
    --accent-foreground: 0 0% 96%;

    --destructive: 0 62% 30%;
    --destructive-foreground: 0 0% 100%;

    --border: 0 0% 22%;
    --input: 0 0% 22%;
    --ring: {dark_primary};

    --success: 152 69% 31%;
    --success-bg: 150 100% 6%;
    --warning: 46 100% 47%;
    --warning-bg: 40 100% 5%;
    --info: 217 91% 53%;
    --info-bg: 222 100% 23%;
    --error: 0 84% 48%;
    --error-bg: 0 73% 17%;
  }}

  * {{
    @apply border-border;
  }}

  body {{
    @apply bg-background text-foreground font-sans antialiased;
    font-feature-settings: "rlig" 1, "calt" 1;
  }}

  /* Typography scale */
  h1 {{ @apply text-[2.625rem] leading-[3.125rem] font-light tracking-normal; }}
  h2 {{ @apply text-[2rem] leading-[2.5rem] font-normal tracking-normal; }}
  h3 {{ @apply text-[1.75rem] leading-[2.25rem] font-normal tracking-normal; }}
  h4 {{ @apply text-[1.25rem] leading-[1.75rem] font-normal tracking-normal; }}
  h5 {{ @apply text-base leading-6 font-semibold tracking-normal; }}
  h6 {{ @apply text-sm leading-[1.125rem] font-semibold tracking-[0.16px]; }}

  /* Focus visible styles */
  *:focus-visible {{
    @apply outline-none ring-2 ring-primary ring-offset-2 ring-offset-background;
  }}
}}

@layer utilities {{
  /* Body text styles */
  .body-01 {{ @apply text-sm leading-5 font-normal tracking-[0.16px]; }}
  .body-02 {{ @apply text-base leading-6 font-normal tracking-normal; }}
  .label-01 {{ @apply text-xs leading-4 font-normal tracking-[0.32px]; }}
  .label-02 {{ @apply text-sm leading-[1.125rem] font-normal tracking-[0.16px]; }}
  .helper-text-01 {{ @apply text-xs leading-4 font-normal tracking-[0.32px]; }}
  .caption-01 {{ @apply text-xs leading-4 font-normal tracking-[0.32px]; }}

  /* Motion curves */
  .motion-productive {{ transition-timing-function: cubic-bezier(0.2, 0, 0.38, 0.9); }}
  .motion-expressive {{ transition-timing-function: cubic-bezier(0.4, 0.14, 0.3, 1); }}

  .duration-fast-01 {{ transition-duration: 70ms; }}
  .duration-fast-02 {{ transition-duration: 110ms; }}
  .duration-moderate-01 {{ transition-duration: 150ms; }}
  .duration-moderate-02 {{ transition-duration: 240ms; }}

  /* Responsive grid */
  .ds-grid {{
    @apply grid gap-8;
    grid-template-columns: repeat(4, 1fr);
  }}
  @media (min-width: 672px) {{ .ds-grid {{ grid-template-columns: repeat(8, 1fr); }} }}
  @media (min-width: 1056px) {{ .ds-grid {{ grid-template-columns: repeat(16, 1fr); }} }}

  .ds-grid-container {{ @apply w-full mx-auto px-0; }}
  @media (min-width: 672px) {{ .ds-grid-container {{ @apply px-4; }} }}
  @media (min-width: 1584px) {{ .ds-grid-container {{ @apply px-6; max-width: 1584px; }} }}

  /* Caret blink animation for OTP input */
  @keyframes caret-blink {{
    0%, 70%, 100% {{ opacity: 1; }}
    20%, 50% {{ opacity: 0; }}
  }}
  .animate-caret-blink {{ animation: caret-blink 1.25s ease-out infinite; }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Accent;

    #[test]
    fn test_embeds_preset_primary() {
        let css = generate_stylesheet(&ThemeSelection::named(Accent::Blue));
        assert!(css.contains("--primary: 217 91% 53%;"));
        assert!(css.contains("--ring: 217 91% 53%;"));
        assert!(css.contains("accent color: blue"));
    }

    #[test]
    fn test_light_and_dark_variants_differ_when_preset_does() {
        let css = generate_stylesheet(&ThemeSelection::named(Accent::Green));
        assert!(css.contains("--primary: 152 69% 31%;"));
        assert!(css.contains("--primary: 149 62% 40%;"));
    }

    #[test]
    fn test_custom_color_used_for_both_blocks() {
        let css = generate_stylesheet(&ThemeSelection::custom("#ff0000"));
        assert_eq!(css.matches("--primary: 0 100% 50%;").count(), 2);
        assert!(css.contains("accent color: custom"));
    }

    #[test]
    fn test_deterministic() {
        let theme = ThemeSelection::named(Accent::Teal);
        assert_eq!(generate_stylesheet(&theme), generate_stylesheet(&theme));
    }
}

//! End-to-end rendering scenarios.

use helpfmt::{
    render_sections, FormatError, FormatterConfig, HelpSection, OverflowStrategy,
};

fn options_section() -> HelpSection {
    HelpSection::new("Options")
        .row("--verbose", "Enable verbose output.")
        .row("-h, --help", "Show this message and exit.")
}

#[test]
fn tabular_layout_at_width_50() {
    let config = FormatterConfig::new().width(50);
    let help = render_sections(&[options_section()], &config, true, OverflowStrategy::Wrap)
        .unwrap();

    // Column 1 is as wide as "-h, --help" (10); column 2 starts at column 12
    // of the section body and both descriptions fit on one line.
    let expected = "\
Options:
  --verbose   Enable verbose output.
  -h, --help  Show this message and exit.
";
    assert_eq!(help, expected);
}

#[test]
fn narrow_terminal_falls_back_to_linear() {
    let config = FormatterConfig::new().width(15);
    let help = render_sections(&[options_section()], &config, true, OverflowStrategy::Wrap)
        .unwrap();

    let expected = "\
Options:
  --verbose
      Enable
      verbose
      output.

  -h, --help
      Show this
      message
      and exit.
";
    assert_eq!(help, expected);
}

#[test]
fn long_descriptions_wrap_under_column_two() {
    let section = HelpSection::new("Options").row(
        "--color",
        "Colorize the output; accepts the values auto, always and never.",
    );
    let config = FormatterConfig::new().width(40);
    let help = render_sections(&[section], &config, true, OverflowStrategy::Wrap).unwrap();

    let expected = "\
Options:
  --color  Colorize the output; accepts
           the values auto, always and
           never.
";
    assert_eq!(help, expected);
}

#[test]
fn truncate_strategy_keeps_one_line_per_row() {
    let section = HelpSection::new("Options").row(
        "--color",
        "Colorize the output; accepts the values auto, always and never.",
    );
    let config = FormatterConfig::new().width(40);
    let help = render_sections(&[section], &config, true, OverflowStrategy::Truncate).unwrap();

    let expected = "\
Options:
  --color  Colorize the output;...
";
    assert_eq!(help, expected);
}

#[test]
fn aligned_sections_line_up_across_headings() {
    let sections = [
        HelpSection::new("Options").row("-q", "Be quiet."),
        HelpSection::new("Commands").row("disassemble", "Take apart."),
    ];
    let config = FormatterConfig::new().width(60);
    let help = render_sections(&sections, &config, true, OverflowStrategy::Wrap).unwrap();

    let expected = "\
Options:
  -q           Be quiet.

Commands:
  disassemble  Take apart.
";
    assert_eq!(help, expected);
}

#[test]
fn row_separator_applies_to_every_tabular_row() {
    let config = FormatterConfig::new().width(50).row_sep("\n");
    let help = render_sections(&[options_section()], &config, true, OverflowStrategy::Wrap)
        .unwrap();

    let expected = "\
Options:
  --verbose   Enable verbose output.

  -h, --help  Show this message and exit.

";
    assert_eq!(help, expected);
}

#[test]
fn section_description_renders_before_rows() {
    let sections = [HelpSection::new("Commands")
        .description("Run `app COMMAND --help` for command-specific options.")
        .row("init", "Create a new project.")];
    let config = FormatterConfig::new().width(70);
    let help = render_sections(&sections, &config, true, OverflowStrategy::Wrap).unwrap();

    let expected = "\
Commands:
  Run `app COMMAND --help` for command-specific options.
  init  Create a new project.
";
    assert_eq!(help, expected);
}

#[test]
fn rowless_sections_are_skipped_unless_described() {
    let sections = [
        HelpSection::new("Ghost"),
        HelpSection::new("Notes").description("See the manual for details."),
        HelpSection::new("Options").row("-h", "Help."),
    ];
    let config = FormatterConfig::new().width(50);
    let help = render_sections(&sections, &config, true, OverflowStrategy::Wrap).unwrap();

    let expected = "\
Notes:
  See the manual for details.

Options:
  -h  Help.
";
    assert_eq!(help, expected);
}

#[test]
fn invalid_configuration_produces_no_output() {
    let config = FormatterConfig::new().col1_max_width(0);
    let result = render_sections(&[options_section()], &config, true, OverflowStrategy::Wrap);
    assert!(matches!(result, Err(FormatError::Config(_))));
}

#[test]
fn unicode_terms_measure_by_display_width() {
    // "--设置" measures 2 + 4 = 6 columns, wider than "--set".
    let sections = [HelpSection::new("Options")
        .row("--设置", "Configure things.")
        .row("--set", "Alias.")];
    let config = FormatterConfig::new().width(50);
    let help = render_sections(&sections, &config, true, OverflowStrategy::Wrap).unwrap();

    let expected = "\
Options:
  --设置  Configure things.
  --set   Alias.
";
    assert_eq!(help, expected);
}

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["ideaforge-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_trends_and_niches() {
    let cli = Cli::try_parse_from(["ideaforge-cli", "trends"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Trends)));

    let cli = Cli::try_parse_from(["ideaforge-cli", "niches"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Niches)));
}

#[test]
fn generate_defaults() {
    let cli = Cli::try_parse_from(["ideaforge-cli", "generate"]).unwrap();
    let Some(Commands::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    assert!(args.preset.is_none());
    assert!(args.count.is_none());
    assert!(args.min_score.is_none());
    assert!(args.networks.is_empty());
    assert!(args.niches.is_empty());
    assert!(!args.allow_duplicates);
    assert!(args.seed.is_none());
    assert!(args.output.is_none());
    assert!(!args.no_scripts);
}

#[test]
fn generate_with_repeated_filters() {
    let cli = Cli::try_parse_from([
        "ideaforge-cli",
        "generate",
        "--count",
        "5",
        "--min-score",
        "70",
        "--network",
        "TikTok",
        "--network",
        "YouTube",
        "--niche",
        "Marketing",
        "--allow-duplicates",
        "--seed",
        "42",
        "--output",
        "ideas.json",
        "--no-scripts",
    ])
    .unwrap();
    let Some(Commands::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.count, Some(5));
    assert_eq!(args.min_score, Some(70));
    assert_eq!(args.networks, vec!["TikTok".to_string(), "YouTube".to_string()]);
    assert_eq!(args.niches, vec!["Marketing".to_string()]);
    assert!(args.allow_duplicates);
    assert_eq!(args.seed, Some(42));
    assert_eq!(args.output, Some(PathBuf::from("ideas.json")));
    assert!(args.no_scripts);
}

#[test]
fn rejects_non_numeric_count() {
    assert!(Cli::try_parse_from(["ideaforge-cli", "generate", "--count", "many"]).is_err());
}

fn generate_args(extra: &[&str]) -> GenerateArgs {
    let argv = ["ideaforge-cli", "generate"].into_iter().chain(extra.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("expected valid generate args");
    let Some(Commands::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    args
}

#[test]
fn plan_defaults_to_all_configured_entries() {
    let content = ideaforge_core::ContentConfig::builtin().unwrap();
    let plan = generate::build_plan(&content, &generate_args(&[]));

    assert_eq!(plan.count, 20);
    assert_eq!(plan.criteria.allowed_networks, content.network_names());
    assert_eq!(plan.criteria.allowed_niches, content.niche_names());
    assert_eq!(plan.criteria.minimum_score, 50);
    assert!(plan.criteria.avoid_duplicates);
}

#[test]
fn plan_follows_flags() {
    let content = ideaforge_core::ContentConfig::builtin().unwrap();
    let args = generate_args(&["--min-score", "65", "--network", "TikTok", "--allow-duplicates"]);
    let plan = generate::build_plan(&content, &args);

    assert_eq!(plan.criteria.allowed_networks, vec!["TikTok".to_string()]);
    assert_eq!(plan.criteria.minimum_score, 65);
    assert!(!plan.criteria.avoid_duplicates);
}

#[test]
fn quick_preset_narrows_networks_and_niches() {
    let content = ideaforge_core::ContentConfig::builtin().unwrap();
    let args = generate_args(&["--preset", "quick"]);
    assert_eq!(args.preset, Some(generate::Preset::Quick));

    let plan = generate::build_plan(&content, &args);
    assert_eq!(plan.count, 10);
    assert_eq!(plan.criteria.minimum_score, 70);
    assert_eq!(
        plan.criteria.allowed_networks,
        vec!["TikTok".to_string(), "YouTube Shorts".to_string(), "Instagram".to_string()]
    );
    let resolved = plan.criteria.resolve(&content).expect("quick preset resolves");
    assert_eq!(resolved.allowed_networks.len(), 3);
    assert_eq!(resolved.allowed_niches, plan.criteria.allowed_niches);
}

#[test]
fn pro_and_enterprise_presets_cover_everything() {
    let content = ideaforge_core::ContentConfig::builtin().unwrap();

    let pro = generate::build_plan(&content, &generate_args(&["--preset", "pro"]));
    assert_eq!((pro.count, pro.criteria.minimum_score), (25, 75));
    assert_eq!(pro.criteria.allowed_networks, content.network_names());

    let enterprise = generate::build_plan(&content, &generate_args(&["--preset", "enterprise"]));
    assert_eq!((enterprise.count, enterprise.criteria.minimum_score), (100, 80));
    assert_eq!(enterprise.criteria.allowed_niches, content.niche_names());
}

#[test]
fn explicit_flags_override_preset() {
    let content = ideaforge_core::ContentConfig::builtin().unwrap();
    let args = generate_args(&[
        "--preset",
        "enterprise",
        "--count",
        "7",
        "--min-score",
        "60",
        "--niche",
        "Finanzas",
    ]);
    let plan = generate::build_plan(&content, &args);

    assert_eq!(plan.count, 7);
    assert_eq!(plan.criteria.minimum_score, 60);
    assert_eq!(plan.criteria.allowed_niches, vec!["Finanzas".to_string()]);
}

#[test]
fn rejects_unknown_preset() {
    assert!(Cli::try_parse_from(["ideaforge-cli", "generate", "--preset", "huge"]).is_err());
}

#[test]
fn short_title_cuts_at_fifty_chars() {
    assert_eq!(generate::short_title("corto"), "corto");
    let long = "á".repeat(60);
    assert_eq!(generate::short_title(&long), format!("{}...", "á".repeat(50)));
}

use std::env;
use std::path::PathBuf;

use fakesmith_generate::{Dispatch, Factory, GeneratorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut config_path: Option<PathBuf> = None;
    let mut locale: Option<String> = None;
    let mut count = 1_usize;
    let mut unique: Option<String> = None;
    let mut template: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = args.next().map(PathBuf::from),
            "--locale" => locale = args.next(),
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--unique" => unique = args.next(),
            _ => {
                if template.is_none() {
                    template = Some(arg);
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let config = match config_path {
        Some(path) => GeneratorConfig::load(&path)?,
        None => GeneratorConfig::default(),
    };
    let template =
        template.unwrap_or_else(|| "{{name}} <{{company}}> {{phoneNumber}}".to_string());

    let factory = Factory::new(config);
    let mut generator = match locale {
        Some(locale) => factory.create(&locale)?,
        None => factory.create_default()?,
    };

    // `--unique NAME` prints distinct values of one formatter instead.
    if let Some(formatter) = unique {
        let mut proxy = generator.unique();
        for _ in 0..count {
            println!("{}", proxy.get(&formatter)?);
        }
    } else {
        for _ in 0..count {
            println!("{}", generator.parse(&template)?);
        }
    }
    Ok(())
}

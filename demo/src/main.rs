use std::env;
use std::error::Error;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use optval_core::app::tracing::AppTracingBuilder;
use optval_core::create::{create_required, flatten, ToOptional};
use optval_core::{Matcher, Optional};

/// Environment variable holding the path of the log file. File logging is disabled when unset.
const LOG_FILE_ENV: &str = "OPTVAL_LOG_FILE";

const PROFILES_JSON: &str = r#"[
  { "name": "Ada", "nickname": "countess" },
  { "name": "Grace", "nickname": null },
  { "name": "Linus" },
  { "name": "Margaret", "nickname": "root" }
]"#;

#[derive(Serialize, Deserialize, Debug)]
struct Profile {
  name: String,
  #[serde(default)]
  nickname: Optional<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(env::var_os(LOG_FILE_ENV))
    .build()?;

  run()
}

fn run() -> Result<(), Box<dyn Error>> {
  let profiles: Vec<Profile> = serde_json::from_str(PROFILES_JSON)?;
  debug!(count = profiles.len(), "loaded profiles");

  let greeting: Matcher<String, String> = Matcher::new()
    .with_none(|| "Hello, stranger".to_string())?
    .with_some_value("root".to_string(), || "Welcome back, administrator".to_string())?
    .with_some(|nickname| format!("Hello, {nickname}"))?
    .closed();

  for profile in &profiles {
    let message = greeting.result_for(&profile.nickname);
    info!(name = %profile.name, "{}", message);

    let (has_nickname, nickname) = profile.nickname.try_get_value();
    debug!(name = %profile.name, has_nickname, nickname = %nickname, "nickname lookup");
  }

  let nicknames: Vec<String> = flatten(profiles.iter().map(|p| p.nickname.clone())).collect();
  info!(?nicknames, "profiles with a nickname");

  let shouting = profiles.iter()
    .map(|p| p.nickname.as_ref().filter(|n| n.len() > 4).map(|n| n.to_uppercase()))
    .flat_map(Optional::into_iter)
    .collect::<Vec<_>>();
  info!(?shouting, "long nicknames");

  let lookup = profiles.iter().find(|p| p.name == "Alan").map(|p| p.name.clone()).to_optional();
  let name = lookup.value_or_else(|| "nobody".to_string());
  info!(%name, "looked up profile");

  match create_required(env::var("OPTVAL_REQUIRED_NAME").ok()) {
    Ok(required) => info!(required = %required, "required name is set"),
    Err(e) => warn!(%e, "required name is missing"),
  }

  println!("{}", serde_json::to_string_pretty(&profiles)?);
  Ok(())
}

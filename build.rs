use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // .env is optional: the hosted demo falls back to the public demo project.
  let _ = dotenv();

  let supabase_url = std::env::var("SUPABASE_URL")
    .unwrap_or_else(|_| "https://demo-smartix.supabase.co".to_string());
  println!("cargo::rustc-env=SUPABASE_URL={}", supabase_url);

  let supabase_anon_key = std::env::var("SUPABASE_ANON_KEY")
    .unwrap_or_else(|_| "public-anon-demo-key".to_string());
  println!("cargo::rustc-env=SUPABASE_ANON_KEY={}", supabase_anon_key);
}

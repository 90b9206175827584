fn main() {
    // option_env!() values are baked in at compile time, rebuild when they change.
    println!("cargo:rerun-if-env-changed=FACEPP_API_KEY");
    println!("cargo:rerun-if-env-changed=FACEPP_API_SECRET");
}

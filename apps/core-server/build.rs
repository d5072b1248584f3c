fn main() {
    #[allow(clippy::expect_used)]
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build information");
}

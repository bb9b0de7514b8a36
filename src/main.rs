fn main() {
    pollster::block_on(roughboard::run());
}

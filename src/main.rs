fn main() {
    drone_defence::game::run();
}

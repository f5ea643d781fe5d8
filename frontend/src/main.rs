fn main() {
    portal_frontend::start();
}

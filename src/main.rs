fn main() {
    binview_bin::main();
}

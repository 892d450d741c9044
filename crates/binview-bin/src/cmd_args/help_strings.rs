pub static OUTPUT_HELP: &str = "Image to write the rendered view to

The format is picked from the extension, .png writes a PNG,
.pgm, .ppm and .pnm write a binary netpbm image.";

pub static ALIGN_HELP: &str = "Leading bytes to skip before decoding

Range is between 0 and 7. Any bytes left over at the end that
don't make up a whole sample are ignored.";

pub static INTERACTIVE_HELP: &str = "Read view commands from standard input

Each line is one command, the status is printed after every command.
Type `help` at the prompt for the list of commands.";

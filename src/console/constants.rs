// banner shown before the prompts
pub const WELCOME_BANNER: &str =
    "Bienvenido al Portal para agendar cita a la Secretaría de Relaciones Exteriores en Sonora.\n";
pub const OFFICES_HEADER: &str = "Oficinas Disponibles:";

// prompts, in the order the driver asks them
pub const PROMPT_IDENTIFIER: &str = "Introduce tu CURP: ";
pub const PROMPT_EMAIL: &str = "Introduce tu correo: ";
pub const PROMPT_OFFICE: &str = "Oficina deseada para la cita: ";
pub const PROMPT_DAY: &str = "Día deseado (1-31): ";
pub const PROMPT_MONTH: &str = "Mes deseado (1-12): ";

// validation feedback
pub const MSG_EMPTY_IDENTIFIER: &str =
    "No puedes mandar una CURP vacía. Introduzca tu CURP correctamente.";
pub const MSG_INVALID_EMAIL: &str = "Correo inválido. Intenta de nuevo.";
pub const MSG_UNKNOWN_OFFICE: &str = "Por favor, introduzca una oficina disponible.";
pub const MSG_NON_INTEGER: &str = "Entrada inválida. El día y mes deben ser números.";
pub const MSG_INVALID_DATE: &str = "Fecha inválida. Asegúrate de que el día y mes sean correctos.";
pub const MSG_BOOKING_FAILED: &str = "No fue posible agendar la cita. Intenta de nuevo más tarde.";

// confirmation template
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const CONFIRMATION_FOOTER: &str = "    Se te proporcionará al correo ingresado el folio de la cita, un formulario para que lo llene,
    la hoja para realizar el pago de derechos y un tríptico con toda la documentación que necesita presentar al
    llegar a su cita. ¡Que tenga un excelente día!
";

//! Built-in locale dictionaries.

pub(crate) const EN: &[(&str, &str)] = &[
    ("default", "This field is invalid"),
    ("required", "The :field field is required"),
    ("email", "Please enter a valid email address"),
    ("maxlength", "The maximum number of allowed characters is: :arg0"),
    ("minlength", "The minimum number of allowed characters is: :arg0"),
    ("min", "The :field field must be greater than or equal to ':arg0'"),
    ("max", "The :field field must be less than or equal to ':arg0'"),
    ("string", "Please enter a string of characters"),
    ("between", "The value of this field must be between ':arg0' and ':arg1'"),
    ("startWith", "The :field field must start with ':arg0'"),
    ("endWith", "The :field field must end with ':arg0'"),
    ("contains", "The :field field must contain the value ':arg0'"),
    ("in", "Please choose a correct value for the :field field"),
    ("integer", "The :field field must be an integer"),
    ("int", "The :field field must be an integer"),
    ("number", "This field must be a number"),
    ("numeric", "This field must be a number"),
    ("file", "This field must be a file"),
    ("url", "This field must be a valid URL"),
    ("length", "The length of this field must be :arg0"),
    ("len", "The length of this field must be :arg0"),
    ("maxFileSize", "The file size must be less than :arg0."),
    ("minFileSize", "The file size must be greater than :arg0."),
    ("modulo", "The value of :field field must be a multiple of :arg0"),
    ("size", "The size of this field must be less than or equal to :arg0"),
    ("boolean", "This field must be a boolean (yes or no)"),
    ("startWithUpper", "This field must start with an uppercase letter"),
    ("startWithLower", "This field must start with a lowercase letter"),
    ("nullable", ""),
    (
        "password",
        "The password must be at least 8 characters long and include an uppercase letter, \
         a lowercase letter, a digit, and a special character.",
    ),
    ("date", "This field must be a valid date"),
    ("before", "The date must be before (:arg0)"),
    ("after", "The date must be after (:arg0)"),
    ("phone", "This phone number seems to be invalid"),
    ("time", "The :field field must be a valid time."),
    ("startWithLetter", "The :field field must start with a letter"),
    ("excludes", "The :field field must not contain :arg0."),
    ("hasLetter", "This field must contain at least one letter"),
    ("containsLetter", "This field must contain at least one letter"),
    ("regex", "This field is invalid."),
    ("lower", "This field must be lowercase"),
    ("upper", "This field must be uppercase"),
];

pub(crate) const FR: &[(&str, &str)] = &[
    ("default", "Ce champ est invalide"),
    ("required", "Le champ :field est obligatoire"),
    ("email", "Veuillez entrer une adresse email valide"),
    ("maxlength", "Le nombre maximum de caractères autorisés est : :arg0"),
    ("minlength", "Le nombre minimum de caractères autorisés est : :arg0"),
    ("min", "Le champ :field doit être supérieur ou égal à ':arg0'"),
    ("max", "Le champ :field doit être inférieur ou égal à ':arg0'"),
    ("string", "Veuillez entrer une chaîne de caractères"),
    ("between", "La valeur de ce champ doit être comprise entre ':arg0' et ':arg1'"),
    ("startWith", "Le champ :field doit commencer par ':arg0'"),
    ("endWith", "Le champ :field doit se terminer par ':arg0'"),
    ("contains", "Le champ :field doit contenir la valeur ':arg0'"),
    ("in", "Veuillez choisir une valeur correcte pour le champ :field"),
    ("integer", "Le champ :field doit être un entier"),
    ("int", "Le champ :field doit être un entier"),
    ("number", "Ce champ doit être un nombre"),
    ("numeric", "Ce champ doit être un nombre"),
    ("file", "Ce champ doit être un fichier"),
    ("url", "Ce champ doit être une URL valide"),
    ("length", "La longueur de ce champ doit être :arg0"),
    ("len", "La longueur de ce champ doit être :arg0"),
    ("maxFileSize", "La taille du fichier doit être inférieure à :arg0."),
    ("minFileSize", "La taille du fichier doit être supérieure à :arg0."),
    ("modulo", "La valeur du champ :field doit être un multiple de :arg0"),
    ("size", "La taille de ce champ doit être inférieure ou égale à :arg0"),
    ("boolean", "Ce champ doit être un booléen (oui ou non)"),
    ("startWithUpper", "Ce champ doit commencer par une lettre majuscule"),
    ("startWithLower", "Ce champ doit commencer par une lettre minuscule"),
    ("nullable", ""),
    (
        "password",
        "Le mot de passe doit contenir au moins 8 caractères, dont une majuscule, \
         une minuscule, un chiffre et un caractère spécial.",
    ),
    ("date", "Ce champ doit être une date valide"),
    ("before", "La date doit être antérieure à (:arg0)"),
    ("after", "La date doit être postérieure à (:arg0)"),
    ("phone", "Ce numéro de téléphone semble invalide"),
    ("time", "Le champ :field doit être une heure valide."),
    ("startWithLetter", "Le champ :field doit commencer par une lettre"),
    ("excludes", "Le champ :field ne doit pas contenir :arg0."),
    ("hasLetter", "Ce champ doit contenir au moins une lettre"),
    ("containsLetter", "Ce champ doit contenir au moins une lettre"),
    ("regex", "Ce champ est invalide."),
    ("lower", "Ce champ doit être en minuscules"),
    ("upper", "Ce champ doit être en majuscules"),
];
